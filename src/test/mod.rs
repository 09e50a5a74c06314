pub mod builder;


use crate::Tag;

#[test]
fn tag_ids_match_wire_format() {
    let tags = [
        (Tag::End, 0u8),
        (Tag::Byte, 1),
        (Tag::Short, 2),
        (Tag::Int, 3),
        (Tag::Long, 4),
        (Tag::Float, 5),
        (Tag::Double, 6),
        (Tag::ByteArray, 7),
        (Tag::String, 8),
        (Tag::List, 9),
        (Tag::Compound, 10),
        (Tag::IntArray, 11),
        (Tag::LongArray, 12),
    ];

    for (tag, id) in tags {
        assert_eq!(u8::from(tag), id);
        assert_eq!(Tag::try_from(id), Ok(tag));
    }

    for id in 13..=u8::MAX {
        assert!(Tag::try_from(id).is_err());
    }
}
