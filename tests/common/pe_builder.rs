//! Minimal PE32 / PE32+ image writer.
//!
//! Layout (file alignment 0x200, section alignment 0x1000):
//!
//! | section | RVA    | file offset | raw size |
//! |---------|--------|-------------|----------|
//! | headers | 0      | 0           | 0x200    |
//! | .text   | 0x1000 | 0x200       | 0x200    |
//! | .rdata  | 0x2000 | 0x400       | 0x200    |
//!
//! `.rdata` holds the export directory when any exports are added.

pub const TEXT_RVA: u32 = 0x1000;
pub const TEXT_RAW: u32 = 0x200;
pub const TEXT_SIZE: u32 = 0x200;
const RDATA_RVA: u32 = 0x2000;
const RDATA_RAW: u32 = 0x400;
const RDATA_SIZE: u32 = 0x200;
const HEADERS_SIZE: u32 = 0x200;

pub struct PeBuilder {
    is_64: bool,
    image_base: u64,
    text: Vec<u8>,
    exports: Vec<(String, u32)>,
}

fn put_u16(buf: &mut [u8], off: usize, v: u16) {
    buf[off..off + 2].copy_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut [u8], off: usize, v: u32) {
    buf[off..off + 4].copy_from_slice(&v.to_le_bytes());
}

fn put_u64(buf: &mut [u8], off: usize, v: u64) {
    buf[off..off + 8].copy_from_slice(&v.to_le_bytes());
}

impl PeBuilder {
    pub fn pe64() -> Self {
        Self {
            is_64: true,
            image_base: 0x1_4000_0000,
            text: vec![0; TEXT_SIZE as usize],
            exports: Vec::new(),
        }
    }

    pub fn pe32() -> Self {
        Self {
            is_64: false,
            image_base: 0x40_0000,
            text: vec![0; TEXT_SIZE as usize],
            exports: Vec::new(),
        }
    }

    pub fn image_base(&self) -> u64 {
        self.image_base
    }

    /// Places `code` at `rva` inside `.text`.
    pub fn code_at(mut self, rva: u32, code: &[u8]) -> Self {
        let off = (rva - TEXT_RVA) as usize;
        self.text[off..off + code.len()].copy_from_slice(code);
        self
    }

    /// Fills `.text` from `rva` to the section end with `byte`.
    pub fn fill_from(mut self, rva: u32, byte: u8) -> Self {
        let off = (rva - TEXT_RVA) as usize;
        self.text[off..].iter_mut().for_each(|b| *b = byte);
        self
    }

    pub fn export(mut self, name: &str, rva: u32) -> Self {
        self.exports.push((name.to_string(), rva));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut img = vec![0u8; (RDATA_RAW + RDATA_SIZE) as usize];

        // DOS header
        img[0..2].copy_from_slice(b"MZ");
        let e_lfanew = 0x40usize;
        put_u32(&mut img, 0x3c, e_lfanew as u32);

        // NT signature + COFF header
        img[e_lfanew..e_lfanew + 4].copy_from_slice(b"PE\0\0");
        let coff = e_lfanew + 4;
        let opt_size: u16 = if self.is_64 { 0xf0 } else { 0xe0 };
        put_u16(&mut img, coff, if self.is_64 { 0x8664 } else { 0x14c });
        put_u16(&mut img, coff + 2, 2);
        put_u16(&mut img, coff + 16, opt_size);
        put_u16(&mut img, coff + 18, if self.is_64 { 0x2022 } else { 0x2102 });

        // Optional header
        let opt = coff + 20;
        put_u16(&mut img, opt, if self.is_64 { 0x20b } else { 0x10b });
        put_u32(&mut img, opt + 4, TEXT_SIZE);
        put_u32(&mut img, opt + 8, RDATA_SIZE);
        put_u32(&mut img, opt + 16, TEXT_RVA);
        put_u32(&mut img, opt + 20, TEXT_RVA);
        if self.is_64 {
            put_u64(&mut img, opt + 24, self.image_base);
        } else {
            put_u32(&mut img, opt + 24, RDATA_RVA);
            put_u32(&mut img, opt + 28, self.image_base as u32);
        }
        put_u32(&mut img, opt + 32, 0x1000);
        put_u32(&mut img, opt + 36, 0x200);
        put_u16(&mut img, opt + 40, 6);
        put_u16(&mut img, opt + 48, 6);
        put_u32(&mut img, opt + 56, 0x3000);
        put_u32(&mut img, opt + 60, HEADERS_SIZE);
        put_u16(&mut img, opt + 68, 3);
        let dirs = if self.is_64 {
            put_u64(&mut img, opt + 72, 0x10_0000);
            put_u64(&mut img, opt + 80, 0x1000);
            put_u64(&mut img, opt + 88, 0x10_0000);
            put_u64(&mut img, opt + 96, 0x1000);
            put_u32(&mut img, opt + 108, 16);
            opt + 112
        } else {
            put_u32(&mut img, opt + 72, 0x10_0000);
            put_u32(&mut img, opt + 76, 0x1000);
            put_u32(&mut img, opt + 80, 0x10_0000);
            put_u32(&mut img, opt + 84, 0x1000);
            put_u32(&mut img, opt + 92, 16);
            opt + 96
        };

        // Section headers
        let sh = opt + opt_size as usize;
        self.write_section(&mut img, sh, b".text", TEXT_RVA, TEXT_SIZE, TEXT_RAW, 0x6000_0020);
        self.write_section(
            &mut img,
            sh + 40,
            b".rdata",
            RDATA_RVA,
            RDATA_SIZE,
            RDATA_RAW,
            0x4000_0040,
        );

        // Section data
        let text_off = TEXT_RAW as usize;
        img[text_off..text_off + self.text.len()].copy_from_slice(&self.text);

        if !self.exports.is_empty() {
            let size = self.write_exports(&mut img);
            put_u32(&mut img, dirs, RDATA_RVA);
            put_u32(&mut img, dirs + 4, size);
        }
        img
    }

    #[allow(clippy::too_many_arguments)]
    fn write_section(
        &self,
        img: &mut [u8],
        at: usize,
        name: &[u8],
        rva: u32,
        size: u32,
        raw: u32,
        characteristics: u32,
    ) {
        img[at..at + name.len()].copy_from_slice(name);
        put_u32(img, at + 8, size);
        put_u32(img, at + 12, rva);
        put_u32(img, at + 16, size);
        put_u32(img, at + 20, raw);
        put_u32(img, at + 36, characteristics);
    }

    /// Writes IMAGE_EXPORT_DIRECTORY and its tables into `.rdata`.
    /// Returns the directory size.
    fn write_exports(&self, img: &mut [u8]) -> u32 {
        let to_off = |rva: u32| (rva - RDATA_RVA + RDATA_RAW) as usize;
        let n = self.exports.len() as u32;

        let mut sorted: Vec<(String, u32)> = self.exports.clone();
        sorted.sort();

        let dir = RDATA_RVA;
        let eat = dir + 40;
        let names = eat + 4 * n;
        let ordinals = names + 4 * n;
        let dll_name = ordinals + 2 * n;
        let mut strings = dll_name + b"test.dll\0".len() as u32;

        let d = to_off(dir);
        put_u32(img, d + 12, dll_name);
        put_u32(img, d + 16, 1);
        put_u32(img, d + 20, n);
        put_u32(img, d + 24, n);
        put_u32(img, d + 28, eat);
        put_u32(img, d + 32, names);
        put_u32(img, d + 36, ordinals);

        let off = to_off(dll_name);
        img[off..off + 9].copy_from_slice(b"test.dll\0");

        for (i, (name, rva)) in sorted.iter().enumerate() {
            let i32_ = i as u32;
            put_u32(img, to_off(eat + 4 * i32_), *rva);
            put_u32(img, to_off(names + 4 * i32_), strings);
            put_u16(img, to_off(ordinals + 2 * i32_), i as u16);
            let off = to_off(strings);
            img[off..off + name.len()].copy_from_slice(name.as_bytes());
            img[off + name.len()] = 0;
            strings += name.len() as u32 + 1;
        }
        strings - dir
    }
}
