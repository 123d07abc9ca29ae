mod launcher;
mod request;
mod runner;
