pub mod body;
pub mod custom;
pub mod element;
pub mod error;
pub mod form;
pub mod modal;
pub mod response;
pub mod simple;
pub mod slot;
