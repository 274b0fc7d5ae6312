mod document;
mod source;
