pub mod cie;
mod cie_tables;
pub mod importer;
pub mod math;
pub mod spectrum;

pub use cie_tables::D65;

/// First wavelength (nm) of the integration grid. Step is 1 nm.
pub const CIE_START: i32 = 360;
/// Last wavelength (nm) of the integration grid, inclusive.
pub const CIE_END: i32 = 830;
pub const CIE_SAMPLES: usize = (CIE_END - CIE_START + 1) as usize;

/// Integer wavelengths of the integration grid.
pub fn visible_wavelengths() -> impl Iterator<Item = i32> {
    CIE_START..=CIE_END
}
