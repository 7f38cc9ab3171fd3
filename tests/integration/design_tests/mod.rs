mod atmosphere;
mod evaluation;
mod plugin;
mod scenarios;
