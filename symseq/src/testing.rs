// Symbols shared by the unit tests.
use symseq_logic::{N1, N4, N8};

use crate::ordering::{ByKey, Key};

crate::symbols! {
    pub Int,
    pub Char,
    pub Double,
    pub Bool,
    pub Float,
}

// byte width; Int ties with Float and Char ties with Bool
pub struct Width;

impl Key<Int> for Width {
    type Output = N4;
}

impl Key<Char> for Width {
    type Output = N1;
}

impl Key<Double> for Width {
    type Output = N8;
}

impl Key<Bool> for Width {
    type Output = N1;
}

impl Key<Float> for Width {
    type Output = N4;
}

pub type ByWidth = ByKey<Width>;
