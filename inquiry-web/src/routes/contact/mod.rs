mod page;

pub use page::Contact;
