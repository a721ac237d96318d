mod export;
mod progress;
mod render;
