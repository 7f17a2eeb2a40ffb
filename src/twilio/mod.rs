pub mod token;
pub mod twiml;
pub mod voice;
