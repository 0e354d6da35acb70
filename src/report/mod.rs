mod banner;
mod json;

pub(crate) use banner::Report;
