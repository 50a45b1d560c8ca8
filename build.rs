//! Build script: rebuild when the SQL schema changes, since it is embedded with include_str!.

fn main() {
    println!("cargo:rerun-if-changed=src/schema.sql");
}
