pub mod merged;
pub mod order;
pub mod summary;
pub mod user;

pub use merged::*;
pub use order::*;
pub use summary::*;
pub use user::*;
