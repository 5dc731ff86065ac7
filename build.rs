use std::env;
use std::fs;
use std::path::Path;
#[cfg(target_os = "macos")]
use std::process::Command;

fn main() {
    // Get the project directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Create assets directory in the project directory
    let assets_dir = Path::new(&manifest_dir).join("assets");
    if !assets_dir.exists() {
        fs::create_dir_all(&assets_dir).unwrap();
    }

    create_asset_directories(&assets_dir);
    report_missing_assets(&assets_dir);

    // Let Cargo know to rerun if any of these directories change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/");

    // Handle SDL2 library linking
    link_sdl2_libraries();
}

const SDL_LIBRARIES: [(&str, &str); 3] = [
    ("sdl2", "SDL2"),
    ("sdl2_image", "SDL2_image"),
    ("sdl2_ttf", "SDL2_ttf"),
];

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        if !is_homebrew_available() {
            println!("cargo:warning=Homebrew not found; install SDL2, SDL2_image and SDL2_ttf manually");
            return;
        }
        for (formula, lib) in SDL_LIBRARIES.iter() {
            match get_homebrew_path(formula) {
                Ok(prefix) => {
                    println!("cargo:rustc-link-search={}/lib", prefix);
                    println!("cargo:rustc-link-lib={}", lib);
                }
                Err(e) => println!("cargo:warning={} (brew install {})", e, formula),
            }
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let libs: Vec<&str> = SDL_LIBRARIES.iter().map(|(_, lib)| *lib).collect();
        println!("SDL2 libraries needed at link time: {}", libs.join(", "));
        println!("For example: sudo apt-get install libsdl2-dev libsdl2-image-dev libsdl2-ttf-dev");
    }
}

#[cfg(target_os = "macos")]
fn is_homebrew_available() -> bool {
    Command::new("brew").arg("--version").output().is_ok()
}

#[cfg(target_os = "macos")]
fn get_homebrew_path(formula: &str) -> Result<String, String> {
    let output = Command::new("brew")
        .args(["--prefix", formula])
        .output()
        .map_err(|e| format!("Failed to execute brew: {}", e))?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(format!("{} not found in homebrew", formula))
    }
}

fn create_asset_directories(assets_dir: &Path) {
    let subdirs = ["fonts/open_sans"];
    for subdir in subdirs.iter() {
        let dir_path = assets_dir.join(subdir);
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).unwrap();
        }
    }
}

fn report_missing_assets(assets_dir: &Path) {
    // The game runs without these, drawing nothing in their place
    let expected = [
        "car_1.png",
        "car_2.png",
        "obstacle.png",
        "evador.png",
        "fonts/open_sans/OpenSans.ttf",
    ];
    for asset in expected.iter() {
        if !assets_dir.join(asset).exists() {
            println!("cargo:warning=missing asset assets/{}", asset);
        }
    }
}
