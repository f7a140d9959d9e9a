use std::sync::Arc;

use spritestore::{Color, DirLocator, ImageLoader, Placeholder, SpriteStore, Transparency};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) {
    let path = dir.path().join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, _| {
        image::Rgba([0x20, 0x40, 0x60, if x == 0 { 0 } else { 0xff }])
    });
    let mut buf = std::io::Cursor::new(vec![]);
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

#[test]
fn loads_files_once_and_falls_back() {
    let dir = TempDir::new().unwrap();
    write(&dir, "sprites/ship.png", &png(12, 7));
    write(&dir, "sprites/alien.png", &png(3, 9));
    write(&dir, "sprites/broken.png", b"definitely not an image");

    let store = SpriteStore::from_dir(dir.path());

    let ship = store.get_sprite("sprites/ship.png");
    assert_eq!((ship.width(), ship.height()), (12, 7));
    assert_eq!(ship.bitmap().transparency(), Transparency::Bitmask);
    assert_eq!(ship.bitmap().pixel(0, 0), Some(Color::new(0, 0, 0, 0)));
    assert_eq!(ship.bitmap().pixel(1, 0), Some(Color::new(0x20, 0x40, 0x60, 0xff)));

    let alien = store.get_sprite("sprites/alien.png");
    assert_eq!((alien.width(), alien.height()), (3, 9));
    assert!(!Arc::ptr_eq(&ship, &alien));

    // Replacing the file on disk must not affect the cached sprite.
    write(&dir, "sprites/ship.png", &png(1, 1));
    assert!(Arc::ptr_eq(&store.get_sprite("sprites/ship.png"), &ship));

    let placeholder = Placeholder::default().generate();
    assert_eq!(store.get_sprite("sprites/missing.png").bitmap(), &placeholder);
    assert_eq!(store.get_sprite("sprites/broken.png").bitmap(), &placeholder);
    assert_eq!(store.get_sprite("sprites").bitmap(), &placeholder);
    assert_eq!(store.get_sprite("").bitmap(), &placeholder);

    assert_eq!(
        store.references(),
        vec![
            "sprites/ship.png",
            "sprites/alien.png",
            "sprites/missing.png",
            "sprites/broken.png",
            "sprites",
            "",
        ]
    );
}

#[test]
fn references_cannot_leave_the_root() {
    let dir = TempDir::new().unwrap();
    write(&dir, "secret.png", &png(5, 5));
    write(&dir, "assets/ship.png", &png(2, 2));
    let store = SpriteStore::from_dir(dir.path().join("assets"));

    let placeholder = Placeholder::default().generate();
    let absolute = dir.path().join("secret.png");
    assert_eq!(store.get_sprite(absolute.to_str().unwrap()).bitmap(), &placeholder);
    assert_eq!(store.get_sprite("../secret.png").bitmap(), &placeholder);
    assert_eq!(store.get_sprite("ship.png").width(), 2);
}

#[test]
fn later_roots_fill_gaps() {
    let base = TempDir::new().unwrap();
    let overlay = TempDir::new().unwrap();
    write(&base, "ship.png", &png(4, 4));
    write(&base, "alien.png", &png(2, 2));
    write(&overlay, "ship.png", &png(8, 8));

    let locator = DirLocator::with_roots([overlay.path(), base.path()]);
    let store = SpriteStore::new(ImageLoader::new(locator).with_bitmask(false));

    assert_eq!(store.get_sprite("ship.png").width(), 8);
    assert_eq!(store.get_sprite("alien.png").width(), 2);
    assert_eq!(
        store.get_sprite("ship.png").bitmap().transparency(),
        Transparency::Bitmask
    );
}
