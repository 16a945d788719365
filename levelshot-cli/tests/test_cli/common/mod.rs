use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

mod data;

pub use data::{pk3_archive, tga_image, BSP_DATA, CORRUPT_TGA};

/// Name of the directory holding archives inside a fixture.
pub const INPUT_DIR: &str = "baseq3";

/// Name of the directory the binary writes into, relative to the fixture root.
pub const OUTPUT_DIR: &str = "levelshots";

/// Output from running the binary
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture keeping archives and output in an isolated directory
///
/// The binary runs with the fixture root as its working directory, so its
/// `levelshots/` output lands next to the input directory.
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture with an input directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directories cannot be created.
    pub fn new() -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        fs::create_dir(root_dir.path().join(INPUT_DIR)).unwrap();
        Self { root_dir }
    }

    /// Create fixture with a single archive
    pub fn with_archive(name: &str, entries: &[(&str, &[u8])]) -> Self {
        let fixture = Self::new();
        fixture.add_archive(name, entries);
        fixture
    }

    /// Write an archive into the input directory
    ///
    /// # Panics
    ///
    /// Panics if the archive cannot be written.
    pub fn add_archive(&self, name: &str, entries: &[(&str, &[u8])]) {
        self.add_file(name, &pk3_archive(entries));
    }

    /// Write a raw file into the input directory
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn add_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.input_dir().join(name), contents).unwrap();
    }

    /// Path of the input directory as a string argument
    pub fn input_arg(&self) -> String {
        self.input_dir().to_string_lossy().into_owned()
    }

    /// Path of the input directory
    pub fn input_dir(&self) -> PathBuf {
        self.root_dir.path().join(INPUT_DIR)
    }

    /// Path of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.root_dir.path().join(OUTPUT_DIR)
    }

    /// Path of a file in the output directory
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Sorted names of the files in the output directory
    ///
    /// # Panics
    ///
    /// Panics if the output directory cannot be read.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Dimensions of a converted JPEG in the output directory
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or is not a JPEG.
    pub fn jpeg_dimensions(&self, name: &str) -> (u32, u32) {
        let bytes = fs::read(self.output_path(name)).unwrap();
        let image = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
        (image.width(), image.height())
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run the levelshots binary from the fixture root
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub async fn run(&self, args: &[&str]) -> Output {
        let child = tokio::process::Command::new(env!("CARGO_BIN_EXE_levelshots"))
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
