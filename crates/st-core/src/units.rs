// st-core/src/units.rs

use uom::si::f64::{
    HeatFluxDensity as UomHeatFluxDensity, Length as UomLength,
    TemperatureInterval as UomTemperatureInterval,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Conductivity = UomThermalConductivity;
pub type HeatFlux = UomHeatFluxDensity;
pub type Length = UomLength;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn dt_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn w_per_m2(v: f64) -> HeatFlux {
    use uom::si::heat_flux_density::watt_per_square_meter;
    HeatFlux::new::<watt_per_square_meter>(v)
}

/// Read a temperature back out in °C for display.
#[inline]
pub fn as_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _l = m(0.03);
        let _kc = w_per_m_k(0.7);
        let _t = k(300.0);
        let _dt = dt_k(140.0);
        let _q = w_per_m2(140.0);
    }

    #[test]
    fn celsius_round_trip() {
        let t = degc(150.0);
        assert!(nearly_equal(as_degc(t), 150.0, Tolerances::default()));
        assert!(nearly_equal(t.value, 423.15, Tolerances::default()));
    }

    #[test]
    fn temperature_difference_is_an_interval() {
        let dt = dt_k(degc(150.0).value - degc(10.0).value);
        // Celsius differences equal Kelvin differences
        assert!(nearly_equal(dt.value, 140.0, Tolerances::default()));
    }
}
