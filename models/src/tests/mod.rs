mod convert;
mod model_error;
