//! Type definition module

mod carousel;
mod category;
mod form;
mod notification;
mod order;
mod session;

pub use carousel::{CarouselFields, CarouselItem};
pub use category::{Category, CategoryFields, CategoryStatus, MainCategory};
pub use form::{
    Ack, Attachment, CollectionFilter, FieldValue, Identity, ImagePreview, Submission, Violation,
};
pub use notification::{NotificationOwner, VendorNotification};
pub use order::{OrderLineItem, ShippingAddress, VendorOrder};
pub use session::{Credentials, LoginGrant, Role, Session, SessionIdentity, SessionToken};
