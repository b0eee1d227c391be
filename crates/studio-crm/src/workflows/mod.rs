pub mod crm;
pub mod quiz;
