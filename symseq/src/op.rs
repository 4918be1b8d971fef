//! Results of the sequence operations, as type aliases.
//!
//! Each alias names the `Output` of the trait with the same name, with the
//! arguments in the order the operation is usually written:
//! `op::At<N1, L>` is the symbol at index one of `L`.
use crate::{fold, functional, ordering, search, sequence, structural};

pub type Size<L> = <L as sequence::Sequence>::Size;
pub type Equal<A, B> = <A as sequence::Equal<B>>::Output;
pub type NotEqual<A, B> = <A as sequence::NotEqual<B>>::Output;

pub type PushFront<T, L> = <L as structural::PushFront<T>>::Output;
pub type PushBack<T, L> = <L as structural::PushBack<T>>::Output;
pub type PopFront<L> = <L as structural::PopFront>::Output;
pub type PopBack<L> = <L as structural::PopBack>::Output;
pub type Reverse<L> = <L as structural::Reverse>::Output;
pub type At<I, L> = <L as structural::At<I>>::Output;
pub type Generate<N, G> = <N as structural::Generate<G>>::Output;
pub type Concat<A, B> = <A as structural::Concat<B>>::Output;
pub type FirstK<N, L> = <L as structural::FirstK<N>>::Output;
pub type LastK<N, L> = <L as structural::LastK<N>>::Output;

pub type Find<T, L> = <L as search::Find<T>>::Output;
pub type FindIf<C, L> = <L as search::FindIf<C>>::Output;
pub type Contains<T, L> = <L as search::Contains<T>>::Output;

pub type Transform<M, L> = <L as functional::Transform<M>>::Output;
pub type Filter<C, L> = <L as functional::Filter<C>>::Output;
pub type Unique<L> = <L as functional::Unique>::Output;

pub type IsSorted<C, L> = <L as ordering::IsSorted<C>>::Output;
pub type Merge<C, A, B> = <A as ordering::Merge<C, B>>::Output;
pub type StableSort<C, L> = <L as ordering::StableSort<C>>::Output;

pub type FoldLeft<F, Init, L> = <L as fold::FoldLeft<F, Init>>::Output;
pub type FoldRight<F, Init, L> = <L as fold::FoldRight<F, Init>>::Output;
