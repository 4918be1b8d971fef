// not every test file uses every symbol
#![allow(dead_code)]

use symseq::logic::{N1, N2, N4, N8};
use symseq::{symbols, ByKey, Key};

symbols! {
    pub Int,
    pub Char,
    pub Double,
    pub Bool,
}

symbols! {
    after Bool;
    pub Float,
    pub Short,
}

/// Size in bytes.
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

impl Key<Short> for Width {
    type Output = N2;
}

pub type ByWidth = ByKey<Width>;
