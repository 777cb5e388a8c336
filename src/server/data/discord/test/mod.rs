mod guild;
mod message;
