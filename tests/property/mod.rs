mod grid_properties;
mod store_properties;
mod transition_properties;
