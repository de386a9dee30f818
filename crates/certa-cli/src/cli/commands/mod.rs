pub mod compare;
pub mod dispatch;
pub mod hash;
pub mod issue;
pub mod list;
pub mod lookup;
pub mod qr;
pub mod verify;

pub use dispatch::dispatch;
