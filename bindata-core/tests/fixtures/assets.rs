// @generated by bindata. Do not edit.

pub mod assets {
    static DATA: &[(&str, &[u8])] = &[
        ("icons/logo.png", &[
            0x00, 0x1f, 0xff,
        ]),
        ("readme.txt", &[
            0x68, 0x69,
        ]),
    ];

    /// Bytes of the named resource, `None` when absent.
    pub fn get(name: &str) -> Option<&'static [u8]> {
        DATA.iter().find(|(id, _)| *id == name).map(|(_, data)| *data)
    }

    /// Size of the named resource in bytes, zero when absent.
    pub fn size(name: &str) -> usize {
        get(name).map_or(0, <[u8]>::len)
    }
}
