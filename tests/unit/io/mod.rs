mod render;
mod visualization;
