//! Thermodynamic property models.

#[cfg(feature = "iapws97")]
#[cfg_attr(docsrs, doc(cfg(feature = "iapws97")))]
pub mod iapws97;

#[cfg(feature = "iapws97")]
#[cfg_attr(docsrs, doc(cfg(feature = "iapws97")))]
pub use iapws97::Iapws97;
