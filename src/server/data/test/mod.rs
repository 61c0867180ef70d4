mod mission;
mod user;
