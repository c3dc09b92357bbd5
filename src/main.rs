// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;

fn main() -> ExitCode {
    notchdrop::cli::main()
}
