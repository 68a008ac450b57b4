pub mod email;

pub use email::{ use_email_client, ContactMessage, EmailJsClient, EmailRequest, EmailSender };
