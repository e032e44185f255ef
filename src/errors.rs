// Other modules in this crate `use crate::errors::*;` to get access to everything
// `error_chain!` creates: the Error, ErrorKind, ResultExt and Result types.
// SDL reports failures as plain strings, which convert through `ErrorKind::Msg`.
use error_chain::*;

error_chain! {

    foreign_links {
        DocOptFailure(::docopt::Error);
    }

    errors {
        Render(what: String) {
            description("rendering failed")
            display("rendering failed: {}", what)
        }
        SdlUnavailable {
            description("built without SDL support")
            display("the game window needs the `sdl` feature, rebuild with `--features sdl`")
        }
    }
}
