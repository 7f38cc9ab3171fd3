mod air_data;
mod drag;

pub use air_data::{air_properties_at, density_ratio};
pub use drag::{
    category_drag, clean_drag_at, compressibility_drag, drag_at, induced_drag_coefficient,
    lift_coefficient, CategoryDrag, DragBreakdown,
};
