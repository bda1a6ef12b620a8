//! tests/store_tests.rs
//! Pruebas de los stores de archivos planos (credenciales, recipients,
//! adjuntos y log de envíos).

#[cfg(test)]
mod tests {
    use crate::models::recipient_model::Recipient;
    use crate::services::{
        attachment_store::AttachmentStore, credential_store::CredentialStore,
        recipient_store::RecipientStore, send_log::SendLog,
    };

    #[test]
    fn test_credential_store_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = CredentialStore::new(dir.path().join("credentials.txt"));

        assert!(store.load().is_none());

        store
            .save("user@gmail.com", "app-password")
            .expect("Failed to save");
        let creds = store.load().expect("Credentials should load");
        assert_eq!(creds.username, "user@gmail.com");
        assert_eq!(creds.password, "app-password");
        assert_eq!(store.current_user().as_deref(), Some("user@gmail.com"));

        assert!(store.remove().expect("Failed to remove"));
        assert!(store.load().is_none());
        // Segundo remove: ya no hay nada
        assert!(!store.remove().expect("Remove should not fail"));
    }

    #[test]
    fn test_credential_store_rejects_malformed_line() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("credentials.txt");
        std::fs::write(&path, "no-colon-here\n").expect("Failed to write");

        let store = CredentialStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_recipient_store_replace_and_count() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = RecipientStore::new(dir.path().join("recipients.json"));

        store
            .replace(&[
                Recipient {
                    address: "a@x.com".to_string(),
                    display_name: Some("Ann".to_string()),
                },
                Recipient {
                    address: "".to_string(),
                    display_name: Some("Bo".to_string()),
                },
            ])
            .expect("Failed to replace");

        let loaded = store.load().expect("Failed to load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].address, "a@x.com");
        // Solo cuentan las entradas con dirección
        assert_eq!(store.count_addressable(), 1);
    }

    #[test]
    fn test_recipient_store_count_is_zero_without_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = RecipientStore::new(dir.path().join("missing.json"));
        assert_eq!(store.count_addressable(), 0);
    }

    #[test]
    fn test_csv_import_extracts_positional_columns() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = RecipientStore::new(dir.path().join("recipients.json"));

        // display_name en columna 2, address en columna 5, header primero
        let csv = "Id,Last Name,City,Phone,Email\n\
                   1,Smith,Lima,555,smith@x.com\n\
                   2,,Quito,556,anon@x.com\n\
                   3,Jones,Bogota,557,not-an-email\n\
                   4,Short,row\n";

        let imported = store.import_csv(csv).expect("Import failed");
        assert_eq!(imported, 2);

        let loaded = store.load().expect("Failed to load");
        assert_eq!(loaded[0].address, "smith@x.com");
        assert_eq!(loaded[0].display_name.as_deref(), Some("Smith"));
        assert_eq!(loaded[1].address, "anon@x.com");
        assert_eq!(loaded[1].display_name, None);
    }

    #[test]
    fn test_attachment_store_save_list_delete() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = AttachmentStore::new(dir.path().join("Files"));

        assert!(store.list().is_empty());

        store.save("b.txt", b"two").expect("Failed to save");
        store.save("a.txt", b"one").expect("Failed to save");
        assert_eq!(store.list(), vec!["a.txt", "b.txt"]);

        let paths = store.snapshot_paths();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.txt"));

        assert!(store.delete("a.txt").expect("Failed to delete"));
        assert!(!store.delete("a.txt").expect("Delete should not fail"));
        assert_eq!(store.list(), vec!["b.txt"]);
    }

    #[test]
    fn test_attachment_store_rejects_path_traversal() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = AttachmentStore::new(dir.path().join("Files"));

        assert!(store.save("../evil.txt", b"x").is_err());
        assert!(store.save("a/b.txt", b"x").is_err());
    }

    #[test]
    fn test_send_log_appends_human_readable_lines() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let log = SendLog::new(dir.path().join("logs.txt"));

        assert_eq!(log.read_all(), "");

        log.append("a@x.com").expect("Failed to append");
        log.append("b@x.com").expect("Failed to append");

        let content = log.read_all();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a@x.com > done > "));
        assert!(lines[1].starts_with("b@x.com > done > "));

        // Timestamp local con marcador AM/PM al final
        let stamp = lines[0].rsplit(" > ").next().expect("missing timestamp");
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"), "{}", stamp);
    }
}
