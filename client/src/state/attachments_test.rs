use super::*;

#[test]
fn add_appends_with_sequential_ids() {
    let mut list = AttachmentList::default();
    list.add("transcript.pdf".to_owned(), 2048);
    list.add("photo.png".to_owned(), 0);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].id, 1);
    assert_eq!(list.items[1].id, 2);
    assert_eq!(list.items[1].name, "photo.png");
}

#[test]
fn label_shows_name_and_size() {
    let attachment = Attachment { id: 1, name: "notes.pdf".to_owned(), size: 512 };
    assert_eq!(attachment_label(&attachment), "notes.pdf (512 bytes)");
}
