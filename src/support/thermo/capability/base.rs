/// A property model for one kind of working fluid.
///
/// Every capability trait extends `ThermoModel`, so the fluid a model
/// describes is fixed once and shared by all of its queries.
pub trait ThermoModel {
    /// Fluid marker (or fluid description) carried by every returned state.
    type Fluid;
}
