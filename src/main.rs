fn main() {
    if let Some(exit_code) = hexseq_bin::run_app().err() {
        ::std::process::exit(exit_code.into());
    }
}
