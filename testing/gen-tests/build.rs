fn main() {
    reflectgen_build::generate("src/models.rs", "gen_tests.models")
        .expect("reflectgen codegen failed");
}
