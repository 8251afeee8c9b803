//! Page Components

mod payment;

pub use payment::PaymentPage;
