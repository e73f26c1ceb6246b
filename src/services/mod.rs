/// Business services built on top of the contact book
pub mod birthday_service;
