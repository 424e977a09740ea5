mod access;
mod forms;
mod license;
mod listings;
mod search;
