// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

#[macro_use]
mod util;

mod buffers;
mod infos;
mod layouts;
mod mechparams;
mod mechs;
