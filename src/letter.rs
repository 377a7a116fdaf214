//! Pictograph letters.
//!
//! The alphabet is closed: plain Latin letters, the Greek shift letters,
//! their dash forms, the dash letters, the dual-dash letters and the static
//! letters.

use std::fmt;
use std::str::FromStr;

use crate::errors::SymbolError;

macro_rules! letters {
    ($($variant:ident => $symbol:literal),* $(,)?) => {
        /// A pictograph letter symbol
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Letter {
            $($variant,)*
        }

        impl Letter {
            /// Every letter, in alphabet order
            pub const ALL: &'static [Letter] = &[$(Letter::$variant,)*];

            /// The glyph used to write this letter
            pub fn symbol(self) -> &'static str {
                match self {
                    $(Letter::$variant => $symbol,)*
                }
            }
        }

        impl FromStr for Letter {
            type Err = SymbolError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok(Letter::$variant),)*
                    _ => Err(SymbolError::new("letter", s)),
                }
            }
        }
    };
}

letters! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F",
    G => "G", H => "H", I => "I", J => "J", K => "K", L => "L",
    M => "M", N => "N", O => "O", P => "P", Q => "Q", R => "R",
    S => "S", T => "T", U => "U", V => "V",
    W => "W", X => "X", Y => "Y", Z => "Z",
    Sigma => "Σ", Delta => "Δ", Theta => "θ", Omega => "Ω",
    WDash => "W-", XDash => "X-", YDash => "Y-", ZDash => "Z-",
    SigmaDash => "Σ-", DeltaDash => "Δ-", ThetaDash => "θ-", OmegaDash => "Ω-",
    Phi => "Φ", Psi => "Ψ", Lambda => "Λ",
    PhiDash => "Φ-", PsiDash => "Ψ-", LambdaDash => "Λ-",
    Alpha => "α", Beta => "β", Gamma => "Γ",
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_size() {
        assert_eq!(Letter::ALL.len(), 47);
    }

    #[test]
    fn symbols_round_trip_through_from_str() {
        for &letter in Letter::ALL {
            assert_eq!(letter.symbol().parse::<Letter>(), Ok(letter));
        }
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<_> = Letter::ALL.iter().map(|l| l.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Letter::ALL.len());
    }

    #[test]
    fn unknown_symbol() {
        let err = "Q-".parse::<Letter>().unwrap_err();
        assert_eq!(err.kind, "letter");
        assert_eq!(err.value, "Q-");
    }
}
