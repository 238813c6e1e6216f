mod dashboard;
mod user;
