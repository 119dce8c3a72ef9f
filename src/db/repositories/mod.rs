pub mod searches;
