//! Database Models
//!
//! One file per table. All models serialize in camelCase so the stored
//! documents match the REST payloads one-to-one.

pub mod banner;
pub mod cart_item;
pub mod food;
pub mod order;
pub mod user;

pub use banner::BannerSlide;
pub use cart_item::{CartItem, CartItemCreate};
pub use food::{Food, FoodCreate, FoodStockUpdate, FoodUpdate};
pub use order::{CheckoutCreate, Correlation, Order, OrderCreate, PaymentStatus};
pub use user::{User, UserCreate};
