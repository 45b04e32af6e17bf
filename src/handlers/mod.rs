pub mod inquiries;
pub mod newsletter;
