#[cfg(target_family = "wasm")]
mod plugin;
#[cfg(not(target_family = "wasm"))]
mod terminal;

#[cfg(target_family = "wasm")]
use {plugin::PluginState, zellij_tile::prelude::*};

#[cfg(target_family = "wasm")]
register_plugin!(PluginState);

#[cfg(not(target_family = "wasm"))]
fn main() {
    terminal::run();
}
