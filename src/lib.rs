// Formsmith - Form Definition and Editing System

pub mod actions;
pub mod codec;
pub mod editor;
pub mod form;
pub mod store;
