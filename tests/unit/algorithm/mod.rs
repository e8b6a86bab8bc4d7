mod executor;
mod filmstrip;
mod grid;
mod packer;
mod state;
