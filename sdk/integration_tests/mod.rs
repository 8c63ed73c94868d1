mod client;
mod helpers;
mod receive;
