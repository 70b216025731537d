mod config;
mod flow;
mod store;
