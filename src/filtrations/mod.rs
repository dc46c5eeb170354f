// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use cover::{jaccard_distance, CoverError, CoverFiltration};
pub use entry::{FiltrationEntry, Simplex};
pub use traits::FiltrationBuilder;

mod cover;
mod entry;
mod traits;
