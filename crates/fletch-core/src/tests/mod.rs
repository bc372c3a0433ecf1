mod anchor;
