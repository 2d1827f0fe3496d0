use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy fixture CSVs to OUT_DIR for include_str!, with tiny inline
    // fallbacks so the app still builds from a fresh checkout.
    let countries_src = Path::new("../fixtures/countries.csv");
    if countries_src.exists() {
        fs::copy(countries_src, Path::new(&out_dir).join("countries.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("countries.csv"),
            "ISO3,ISO2,NAME,REGION,INCOME_LEVEL\nNOR,NO,Norway,Europe & Central Asia,High income\n",
        )
        .unwrap();
    }

    let obs_src = Path::new("../fixtures/co2.csv");
    if obs_src.exists() {
        fs::copy(obs_src, Path::new(&out_dir).join("co2.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("co2.csv"),
            "Norway,2000,8.65\nNorway,2001,8.98\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/countries.csv");
    println!("cargo:rerun-if-changed=../fixtures/co2.csv");
}
