use crate::core::fractals::burning_ship::BurningShip;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::fractals::mandelbrot::Mandelbrot;
use crate::core::fractals::newton::Newton;
use crate::core::fractals::tricorn::Tricorn;

static MANDELBROT: Mandelbrot = Mandelbrot;
static TRICORN: Tricorn = Tricorn;
static BURNING_SHIP: BurningShip = BurningShip;
static NEWTON: Newton = Newton;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelSelector {
    #[default]
    Mandelbrot,
    Tricorn,
    BurningShip,
    Newton,
}

impl KernelSelector {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Tricorn, Self::BurningShip, Self::Newton];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
            Self::Newton => "Newton",
        }
    }

    /// Keys 1 to 4 select kernels in [`Self::ALL`] order.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::Mandelbrot),
            2 => Some(Self::Tricorn),
            3 => Some(Self::BurningShip),
            4 => Some(Self::Newton),
            _ => None,
        }
    }

    #[must_use]
    pub fn kernel(self) -> &'static dyn FractalKernel {
        match self {
            Self::Mandelbrot => &MANDELBROT,
            Self::Tricorn => &TRICORN,
            Self::BurningShip => &BURNING_SHIP,
            Self::Newton => &NEWTON,
        }
    }
}

impl std::fmt::Display for KernelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
