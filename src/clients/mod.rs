pub mod nager;
