mod schemas;
mod support;
mod type_resolver;
