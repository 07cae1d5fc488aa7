//! Console screens built on the generic controller

mod carousel;
mod category;
mod login;
mod notification;
mod order;

pub use carousel::{CarouselBoard, CarouselEditor, CarouselList, LoadedCarouselLookup};
pub use category::CategoryEditor;
pub use login::{LoginFields, LoginForm};
pub use notification::{FeedEntry, NotificationFeed};
pub use order::{OrderDetails, OrderView};
