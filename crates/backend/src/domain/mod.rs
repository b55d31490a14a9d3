pub mod a001_customer;
pub mod a002_tag;
pub mod a003_memo;
